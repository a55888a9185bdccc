/// Movie identifiers are opaque strings assigned by the server.
pub type MovieId = String;
