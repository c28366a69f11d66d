mod movie;

pub use movie::MoviePayload;
