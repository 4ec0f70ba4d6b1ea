mod endpoint;
mod loopback;
