mod organisation;
mod user;
