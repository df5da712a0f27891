// Audience views — which derived view a render cycle produces.

pub mod audience;
pub mod selector;
