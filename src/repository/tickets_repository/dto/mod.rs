mod ticket;
mod ticket_status;
mod ticket_type;

pub use ticket::*;
pub use ticket_status::*;
pub use ticket_type::*;
