//! `microsoft.graph.search` namespace: administrative search answers.

mod answer;
mod bookmark;
mod qna;

pub use answer::{AnswerKeyword, AnswerState, AnswerVariant, AnySearchAnswer, SearchAnswer};
pub use bookmark::Bookmark;
pub use qna::Qna;
