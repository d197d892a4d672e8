use std::fmt::Display;

#[derive(Debug)]
pub struct NFDRError {
    msg: String,
}

impl From<String> for NFDRError {
    fn from(msg: String) -> Self {
        NFDRError { msg }
    }
}

impl From<NFDRError> for String {
    fn from(value: NFDRError) -> String {
        value.msg
    }
}

impl From<&str> for NFDRError {
    fn from(msg: &str) -> Self {
        NFDRError { msg: msg.into() }
    }
}

impl Display for NFDRError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}
