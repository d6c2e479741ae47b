mod command;
mod line;

pub use command::{tokenize, Command, Token, TokenKind};
pub use line::{
    classify, Anomaly, AnomalyKind, ClassifiedFile, CommentState, SourceLine, StringState,
};
