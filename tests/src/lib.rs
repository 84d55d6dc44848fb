mod blend;
mod channels;
mod common;
mod compositor;
