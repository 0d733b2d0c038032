//! `store`：内存中的词表（有序、允许重复、不要求排序）。

/// 线性查找的结果（只读视图）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindReport<'a> {
    NotFound,
    Found {
        /// 第一次出现的位置
        index: usize,
        /// 前一个词；`None` 表示它是第一个词
        previous: Option<&'a str>,
        /// 后一个词；`None` 表示它是最后一个词
        next: Option<&'a str>,
    },
}

/// 词表：插入顺序即加载顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.words.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// 整体替换内容（加载新词典时使用）。
    pub fn replace(&mut self, words: Vec<String>) {
        self.words = words;
    }

    /// 线性查找：精确匹配（区分大小写，不做 trim），返回第一次出现的位置。
    pub fn find(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// 查找并给出前后邻居。
    pub fn neighbors(&self, word: &str) -> FindReport<'_> {
        let Some(index) = self.find(word) else {
            return FindReport::NotFound;
        };
        FindReport::Found {
            index,
            previous: index
                .checked_sub(1)
                .and_then(|i| self.words.get(i))
                .map(String::as_str),
            next: self.words.get(index + 1).map(String::as_str),
        }
    }

    /// 删除第一次出现的 `word`，后续元素整体左移一位；不存在时不做任何修改。
    pub fn delete(&mut self, word: &str) -> Option<String> {
        let index = self.find(word)?;
        Some(self.words.remove(index))
    }
}

impl From<Vec<String>> for WordStore {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> WordStore {
        WordStore::from(vec![
            "apple".to_string(),
            "banana".to_string(),
            "cherry".to_string(),
        ])
    }

    #[test]
    fn neighbors_in_the_middle() {
        let store = fruit();
        assert_eq!(
            store.neighbors("banana"),
            FindReport::Found {
                index: 1,
                previous: Some("apple"),
                next: Some("cherry"),
            }
        );
    }

    #[test]
    fn neighbors_at_both_ends() {
        let store = fruit();
        assert_eq!(
            store.neighbors("apple"),
            FindReport::Found {
                index: 0,
                previous: None,
                next: Some("banana"),
            }
        );
        assert_eq!(
            store.neighbors("cherry"),
            FindReport::Found {
                index: 2,
                previous: Some("banana"),
                next: None,
            }
        );
    }

    #[test]
    fn single_word_is_first_and_last() {
        let store = WordStore::from(vec!["solo".to_string()]);
        assert_eq!(
            store.neighbors("solo"),
            FindReport::Found {
                index: 0,
                previous: None,
                next: None,
            }
        );
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let store = fruit();
        assert_eq!(store.find("kiwi"), None);
        assert_eq!(store.find("Apple"), None);
        assert_eq!(store.find(" apple"), None);
        assert_eq!(store.neighbors("kiwi"), FindReport::NotFound);
        assert_eq!(store, fruit());
    }

    #[test]
    fn find_returns_first_duplicate() {
        let store = WordStore::from(vec![
            "a".to_string(),
            "dup".to_string(),
            "b".to_string(),
            "dup".to_string(),
        ]);
        assert_eq!(store.find("dup"), Some(1));
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut store = fruit();
        assert_eq!(store.delete("banana").as_deref(), Some("banana"));
        assert_eq!(store.count(), 2);
        assert_eq!(store.iter().collect::<Vec<_>>(), vec!["apple", "cherry"]);
    }

    #[test]
    fn delete_removes_only_first_occurrence() {
        let mut store = WordStore::from(vec![
            "x".to_string(),
            "y".to_string(),
            "x".to_string(),
        ]);
        store.delete("x");
        assert_eq!(store.iter().collect::<Vec<_>>(), vec!["y", "x"]);
    }

    #[test]
    fn delete_absent_word_is_a_no_op() {
        let mut store = fruit();
        assert_eq!(store.delete("kiwi"), None);
        assert_eq!(store, fruit());
    }
}
