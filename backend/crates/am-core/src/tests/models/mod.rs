mod identity;
mod role;
