pub mod attacks;
pub mod legality;
pub use attacks::{check_after_move, detect_attackers};
pub use legality::{is_move_legal, legal_destinations, legal_moves, path_is_clear};
