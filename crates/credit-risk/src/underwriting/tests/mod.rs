mod common;

mod domain;
mod routing;
mod score;
