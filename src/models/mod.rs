pub mod coordinate;
pub mod duty;
pub mod plan;
pub mod route;
pub mod session;
pub mod stop;
pub mod trip;
