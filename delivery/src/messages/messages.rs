use actix::Message;

/// A line typed at the delivery map prompt.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct UserInput(pub String);
