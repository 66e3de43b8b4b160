//! External collaborators: the probing tool and the launcher.

pub mod ffprobe;
pub mod launcher;
