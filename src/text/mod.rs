// Text processing — tokenizing, stopword removal, frequency ranking,
// summarizing and risk-term highlighting of publication titles.
//
// Every function here is total: no input makes them fail or panic.

pub mod frequency;
pub mod highlight;
pub mod stopwords;
pub mod summarize;
pub mod tokenize;
