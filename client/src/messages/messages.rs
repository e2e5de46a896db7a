use actix::Message;
use common::types::page::Page;

/// A line typed by the user.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct UserInput(pub String);

#[derive(Message, Debug, Clone)]
#[rtype(result = "Page")]
pub struct GetCurrentPage;
