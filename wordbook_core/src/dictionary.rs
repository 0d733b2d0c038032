use std::{fmt, io};

/// 可选词典编号的范围（含两端）。
pub const MIN_DICTIONARY: u8 = 1;
pub const MAX_DICTIONARY: u8 = 7;

/// 词典编号：只是 UI 标签，对应文件 `dictionaryN.txt`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictionaryId(u8);

impl DictionaryId {
    /// 超出 `MIN_DICTIONARY..=MAX_DICTIONARY` 时返回 `None`。
    pub fn new(n: i64) -> Option<Self> {
        let n = u8::try_from(n).ok()?;
        (MIN_DICTIONARY..=MAX_DICTIONARY).contains(&n).then_some(Self(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn file_name(self) -> String {
        format!("dictionary{}.txt", self.0)
    }
}

impl Default for DictionaryId {
    fn default() -> Self {
        Self(MIN_DICTIONARY)
    }
}

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 存储层错误。`name` 是调用方传入的文件名（相对存储根目录）。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("cannot open {name}: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("{name} already exists")]
    AlreadyExists { name: String },
    #[error("I/O error on {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    pub fn name(&self) -> &str {
        match self {
            Self::Open { name, .. }
            | Self::AlreadyExists { name }
            | Self::Io { name, .. } => name,
        }
    }
}

/// 存储抽象：core 不关心词表来自文件/内存/网络。
///
/// 约定：
/// - `read_words` 成功时返回按出现顺序排列的全部词
/// - `write_words` 绝不覆盖已存在的目标；失败时不留下半成品
pub trait Storage {
    fn read_words(&self, name: &str) -> Result<Vec<String>, StorageError>;

    /// 返回写入的词数。
    fn write_words(&self, name: &str, words: &[String]) -> Result<usize, StorageError>;
}
