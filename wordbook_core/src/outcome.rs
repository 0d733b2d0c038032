//! `outcome`：一次请求的结果，给 UI 层展示用。
//!
//! 所有失败（找不到词、打不开文件、目标已存在）都表现为某个 `Outcome` 变体，
//! 只终止当前这一次操作，不会终止会话。

use std::fmt;

use crate::{
    command::PendingCommand,
    dictionary::{DictionaryId, StorageError},
};

#[derive(Debug)]
pub enum Outcome<'a> {
    Count {
        words: usize,
        dictionary: Option<DictionaryId>,
    },
    /// 当前词表全部内容（按顺序）
    Listing(&'a [String]),
    Found {
        word: String,
        previous: Option<&'a str>,
        next: Option<&'a str>,
    },
    NotFound(String),
    Deleted(String),
    ComingSoon(PendingCommand),
    Loaded {
        dictionary: DictionaryId,
        words: usize,
    },
    LoadFailed(StorageError),
    Written {
        name: String,
        words: usize,
    },
    WriteFailed(StorageError),
    Bye,
}

impl Outcome<'_> {
    /// 本次操作是否失败（找不到词也算）。
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::NotFound(_) | Outcome::LoadFailed(_) | Outcome::WriteFailed(_)
        )
    }
}

/// 每一行都以换行结尾，便于直接 `write!` 到终端。
impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Count {
                words,
                dictionary: Some(id),
            } => writeln!(f, "There are {words} words in dictionary #{id}."),
            Outcome::Count {
                words,
                dictionary: None,
            } => writeln!(f, "There are {words} words; no dictionary is loaded."),
            Outcome::Listing(words) => {
                for w in words.iter() {
                    writeln!(f, "{w}")?;
                }
                Ok(())
            }
            Outcome::Found {
                word,
                previous,
                next,
            } => {
                writeln!(f, "Your word was '{word}'.")?;
                match previous {
                    Some(p) => writeln!(f, "The previous word would be '{p}'.")?,
                    None => writeln!(f, "It is the first word.")?,
                }
                match next {
                    Some(n) => writeln!(f, "The next word would be '{n}'."),
                    None => writeln!(f, "'{word}' is the last word."),
                }
            }
            Outcome::NotFound(word) => {
                writeln!(f, "Your word was '{word}'.")?;
                writeln!(f, "We did not find your word.")
            }
            Outcome::Deleted(word) => {
                writeln!(f, "Your word was '{word}'.")?;
                writeln!(f, "The word '{word}' has been deleted.")
            }
            Outcome::ComingSoon(_) => writeln!(f, "Coming soon!"),
            Outcome::Loaded { dictionary, .. } => writeln!(f, "Dictionary {dictionary} is open."),
            Outcome::LoadFailed(err) => {
                writeln!(f, "ERROR! Cannot read chosen dictionary \"{}\".", err.name())
            }
            Outcome::Written { name, words } => {
                writeln!(f, "Writing to file...")?;
                writeln!(f, "                   ...Done! ({words} words written to {name})")
            }
            Outcome::WriteFailed(StorageError::AlreadyExists { name }) => {
                writeln!(f, "Error! The file {name} already exists.")
            }
            Outcome::WriteFailed(err) => writeln!(f, "Error! {err}."),
            Outcome::Bye => writeln!(f, "Thank you! Bye!"),
        }
    }
}
