use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordnumError {
    // 词法错误
    #[error("unknown number word: {0}")]
    UnknownWord(String),

    #[error("empty number phrase")]
    EmptyPhrase,
}

pub type WordnumResult<T> = Result<T, WordnumError>;
