// Record filtering — keyword match on titles and the optional year range.

pub mod matcher;
