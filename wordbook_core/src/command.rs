use crate::dictionary::DictionaryId;

/// 菜单命令（对应菜单上的编号）。
///
/// 说明：
/// - 尚未实现的命令统一收进 `Pending`，只会得到 "Coming soon!"
/// - CLI 负责读编号和辅助输入，再组装成 `Request`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Count,
    Print,
    LinearSearch,
    Delete,
    Pending(PendingCommand),
    Load,
    WriteToFile,
}

/// 菜单上列出但还没有实现的命令。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingCommand {
    Swap,
    BubbleSort,
    SelectionSort,
    BinarySearch,
    InsertSorted,
    Merge,
}

impl Command {
    /// 菜单按编号顺序列出的命令（不含 Quit）。
    pub const MENU: [Command; 12] = [
        Command::Count,
        Command::Print,
        Command::LinearSearch,
        Command::Delete,
        Command::Pending(PendingCommand::Swap),
        Command::Pending(PendingCommand::BubbleSort),
        Command::Pending(PendingCommand::SelectionSort),
        Command::Pending(PendingCommand::BinarySearch),
        Command::Pending(PendingCommand::InsertSorted),
        Command::Pending(PendingCommand::Merge),
        Command::Load,
        Command::WriteToFile,
    ];

    pub const QUIT_NUMBER: u8 = 0;
    pub const MIN_NUMBER: u8 = 1;
    pub const MAX_NUMBER: u8 = Self::MENU.len() as u8;

    pub fn from_number(n: i64) -> Option<Self> {
        if n == i64::from(Self::QUIT_NUMBER) {
            return Some(Command::Quit);
        }
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::MENU.get(index).copied()
    }

    pub fn number(self) -> u8 {
        match self {
            Command::Quit => Self::QUIT_NUMBER,
            Command::Count => 1,
            Command::Print => 2,
            Command::LinearSearch => 3,
            Command::Delete => 4,
            Command::Pending(PendingCommand::Swap) => 5,
            Command::Pending(PendingCommand::BubbleSort) => 6,
            Command::Pending(PendingCommand::SelectionSort) => 7,
            Command::Pending(PendingCommand::BinarySearch) => 8,
            Command::Pending(PendingCommand::InsertSorted) => 9,
            Command::Pending(PendingCommand::Merge) => 10,
            Command::Load => 11,
            Command::WriteToFile => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::Count => "Count - get number of words in dictionary",
            Command::Print => "Print words to screen",
            Command::LinearSearch => "Find a word (Linear Search)",
            Command::Delete => "Find word, delete if found",
            Command::Pending(PendingCommand::Swap) => "Swap two words",
            Command::Pending(PendingCommand::BubbleSort) => "Sort words (Bubble Sort)",
            Command::Pending(PendingCommand::SelectionSort) => "Sort words (Selection Sort)",
            Command::Pending(PendingCommand::BinarySearch) => {
                "Find a word - Binary Search (assumes words are sorted alphabetically)"
            }
            Command::Pending(PendingCommand::InsertSorted) => {
                "Find word, insert if not found (assumes words are sorted alphabetically)"
            }
            Command::Pending(PendingCommand::Merge) => "Merge two dictionaries (will sort first)",
            Command::Load => "Load a dictionary (closes current dictionary)",
            Command::WriteToFile => "Write current dictionary to file",
        }
    }
}

/// 交给 `Session::handle` 的请求：命令 + 已读取的辅助输入。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Count,
    Print,
    Find(String),
    Delete(String),
    Pending(PendingCommand),
    Load(DictionaryId),
    /// 已解析好的输出文件名（见 `resolve_output_name`）
    Write(String),
    Quit,
}

/// 用户输入 `d` 时使用默认文件名，否则自动追加 `.txt`。
pub fn resolve_output_name(input: &str, default: &str) -> String {
    if input == "d" {
        default.to_string()
    } else {
        format!("{input}.txt")
    }
}
