//! `Session`：对上层（CLI）提供的会话对象。
//!
//! `Session` 持有全部会话状态，不使用任何全局变量：
//! - 当前词表（`WordStore`）
//! - 当前打开的词典编号（未加载时为 `None`）
//! - 存储后端（`Storage`，可插拔）
//!
//! 状态只有两种：未加载 / 已加载。只有成功的 `Load` 会改变当前词典，
//! 失败的加载保持原状。

use crate::{
    command::Request,
    dictionary::{DictionaryId, MAX_DICTIONARY, MIN_DICTIONARY, Storage},
    outcome::Outcome,
    store::{FindReport, WordStore},
};

/// 选择词典时的输入错误（可恢复，重新提示即可）。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("That number is not in the available range! Pick another.")]
    OutOfRange,
    #[error("That dictionary is already open! Pick another.")]
    AlreadyOpen(DictionaryId),
}

pub struct Session<S> {
    storage: S,
    store: WordStore,
    current: Option<DictionaryId>,
}

impl<S: Storage> Session<S> {
    /// 创建未加载状态的会话。
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            store: WordStore::new(),
            current: None,
        }
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 当前打开的词典；未成功加载过时为 `None`。
    pub fn current(&self) -> Option<DictionaryId> {
        self.current
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// 校验用户输入的词典编号：必须在范围内，且不能是已经打开的那个。
    pub fn choose_dictionary(&self, n: i64) -> Result<DictionaryId, SelectionError> {
        let id = DictionaryId::new(n).ok_or(SelectionError::OutOfRange)?;
        if self.current == Some(id) {
            return Err(SelectionError::AlreadyOpen(id));
        }
        Ok(id)
    }

    /// 可选词典编号范围，给提示语用。
    pub fn dictionary_range(&self) -> (u8, u8) {
        (MIN_DICTIONARY, MAX_DICTIONARY)
    }

    /// 处理一个请求，返回结果。任何失败都只影响本次请求。
    pub fn handle(&mut self, request: Request) -> Outcome<'_> {
        match request {
            Request::Count => Outcome::Count {
                words: self.store.count(),
                dictionary: self.current,
            },
            Request::Print => Outcome::Listing(self.store.as_slice()),
            Request::Find(word) => {
                let report = self.store.neighbors(&word);
                match report {
                    FindReport::Found { previous, next, .. } => Outcome::Found {
                        word,
                        previous,
                        next,
                    },
                    FindReport::NotFound => Outcome::NotFound(word),
                }
            }
            Request::Delete(word) => match self.store.delete(&word) {
                Some(removed) => Outcome::Deleted(removed),
                None => Outcome::NotFound(word),
            },
            Request::Pending(cmd) => Outcome::ComingSoon(cmd),
            Request::Load(id) => match self.storage.read_words(&id.file_name()) {
                Ok(words) => {
                    let count = words.len();
                    self.store.replace(words);
                    self.current = Some(id);
                    Outcome::Loaded {
                        dictionary: id,
                        words: count,
                    }
                }
                Err(err) => Outcome::LoadFailed(err),
            },
            Request::Write(name) => match self.storage.write_words(&name, self.store.as_slice()) {
                Ok(words) => Outcome::Written { name, words },
                Err(err) => Outcome::WriteFailed(err),
            },
            Request::Quit => Outcome::Bye,
        }
    }
}
