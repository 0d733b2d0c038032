use std::{
    borrow::Cow,
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use log::{debug, info, warn};
use wordbook_core::dictionary::{Storage, StorageError};

/// 估算时假设的平均词长（字节，含分隔符）。
const AVERAGE_WORD_LENGTH: u64 = 7;
/// 在估算值之上多预留的比例：5/4 = 1.25。
const CUSHION: (u64, u64) = (5, 4);
/// 拿不到文件大小时的预留容量。
const DEFAULT_CAPACITY: usize = 1000;

/// 根据文件大小估算词数，只作为 `Vec` 预分配的提示。
///
/// `(size / 7) * 1.25`；大小未知时回退到 1000。
pub fn estimate_capacity(file_size: Option<u64>) -> usize {
    let Some(size) = file_size else {
        return DEFAULT_CAPACITY;
    };
    let estimate = size / AVERAGE_WORD_LENGTH * CUSHION.0 / CUSHION.1;
    usize::try_from(estimate).unwrap_or(DEFAULT_CAPACITY)
}

/// C 的 `isspace` 字符集：空格、\t、\n、\v、\f、\r。其他字节（包括 NBSP 等
/// 非 ASCII 空白）都算词的一部分。
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// 按 `is_space` 切分出非空的词（字节形式）。
pub fn tokens(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes.split(|&b| is_space(b)).filter(|t| !t.is_empty())
}

/// 逐行写出：每个词一行，以换行结尾。返回写出的行数。
pub fn write_lines<W, I>(mut out: W, words: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut n = 0;
    for w in words {
        writeln!(out, "{}", w.as_ref())?;
        n += 1;
    }
    Ok(n)
}

/// 基于目录的存储：`name` 都相对于 `root` 解析。
///
/// 文件格式：
/// - 读：任意字节，按 ASCII 空白切分成词，非 UTF-8 的词按 lossy 方式解码，读到 EOF，没有表头/计数前缀
/// - 写：每个词一行；目标已存在时拒绝写入
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for DirStorage {
    fn read_words(&self, name: &str) -> Result<Vec<String>, StorageError> {
        let path = self.path(name);
        let file = File::open(&path).map_err(|source| {
            warn!("cannot open {}: {source}", path.display());
            StorageError::Open {
                name: name.to_string(),
                source,
            }
        })?;

        let file_size = file.metadata().ok().map(|m| m.len());
        let capacity = estimate_capacity(file_size);
        debug!(
            "loading {}: file size {:?}, estimated reserve {capacity}",
            path.display(),
            file_size
        );

        let mut words: Vec<String> = Vec::with_capacity(capacity);
        let mut lossy = 0usize;
        for chunk in BufReader::new(file).split(b'\n') {
            let chunk = chunk.map_err(|source| StorageError::Io {
                name: name.to_string(),
                source,
            })?;
            for token in tokens(&chunk) {
                let word = String::from_utf8_lossy(token);
                if matches!(word, Cow::Owned(_)) {
                    lossy += 1;
                }
                words.push(word.into_owned());
            }
        }
        if lossy > 0 {
            warn!(
                "{}: {lossy} words were not valid UTF-8 and were decoded lossily",
                path.display()
            );
        }

        debug!(
            "loaded {}: len {}, capacity {}",
            path.display(),
            words.len(),
            words.capacity()
        );
        Ok(words)
    }

    fn write_words(&self, name: &str, words: &[String]) -> Result<usize, StorageError> {
        let path = self.path(name);
        // create_new: 目标已存在时原子地失败，不会截断已有文件
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => StorageError::AlreadyExists {
                    name: name.to_string(),
                },
                _ => StorageError::Io {
                    name: name.to_string(),
                    source,
                },
            })?;

        let mut out = BufWriter::new(file);
        let written = write_lines(&mut out, words).and_then(|n| out.flush().map(|()| n));
        match written {
            Ok(n) => {
                info!("wrote {n} words to {}", path.display());
                Ok(n)
            }
            Err(source) => {
                drop(out);
                if let Err(e) = fs::remove_file(&path) {
                    warn!("cannot remove partial file {}: {e}", path.display());
                }
                Err(StorageError::Io {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }
}
