//! 交互菜单：读编号 -> 读辅助输入 -> 交给 `Session` -> 打印 `Outcome`。
//!
//! 输入按行读取；输入结束（EOF）等同于选择退出。

use std::io::{self, BufRead, Write};

use log::debug;
use wordbook_core::{
    command::{Command, Request, resolve_output_name},
    dictionary::{DictionaryId, Storage},
    session::{SelectionError, Session},
};

const RULE: &str = "--------------------------------------------";

pub struct Menu<R, W> {
    input: R,
    out: W,
    /// 输出文件名提示里输入 `d` 时使用
    default_output: String,
    line: String,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, default_output: String) -> Self {
        Self {
            input,
            out,
            default_output,
            line: String::new(),
        }
    }

    /// 启动时打开默认词典；成功时不输出，失败时报告并以未加载状态继续。
    pub fn open<S: Storage>(&mut self, session: &mut Session<S>, id: DictionaryId) -> io::Result<()> {
        let outcome = session.handle(Request::Load(id));
        if outcome.is_failure() {
            write!(self.out, "{outcome}")?;
        }
        Ok(())
    }

    pub fn run<S: Storage>(&mut self, session: &mut Session<S>) -> io::Result<()> {
        loop {
            let Some(command) = self.read_command()? else {
                return self.quit(session);
            };
            debug!("menu command {command:?}");
            let request = match command {
                Command::Quit => return self.quit(session),
                Command::Count => Request::Count,
                Command::Print => Request::Print,
                Command::LinearSearch => match self.read_token("Enter a word to find: ")? {
                    Some(word) => Request::Find(word),
                    None => return self.quit(session),
                },
                Command::Delete => {
                    match self.read_token("Enter a word to delete from the chosen Dictionary: ")? {
                        Some(word) => Request::Delete(word),
                        None => return self.quit(session),
                    }
                }
                Command::Pending(cmd) => Request::Pending(cmd),
                Command::Load => match self.read_dictionary(session)? {
                    Some(id) => Request::Load(id),
                    None => return self.quit(session),
                },
                Command::WriteToFile => match self.read_token(
                    "Enter name of file (.txt will be appended automatically), or enter 'd' to use default filename: ",
                )? {
                    Some(name) => Request::Write(resolve_output_name(&name, &self.default_output)),
                    None => return self.quit(session),
                },
            };
            let outcome = session.handle(request);
            write!(self.out, "{outcome}")?;
            self.out.flush()?;
        }
    }

    fn quit<S: Storage>(&mut self, session: &mut Session<S>) -> io::Result<()> {
        let outcome = session.handle(Request::Quit);
        write!(self.out, "{outcome}")?;
        self.out.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Options menu:")?;
        for cmd in Command::MENU {
            writeln!(self.out, "({}) {}", cmd.number(), cmd.label())?;
        }
        write!(
            self.out,
            "Enter a number from {} to {}, or {} to exit: ",
            Command::MIN_NUMBER,
            Command::MAX_NUMBER,
            Command::QUIT_NUMBER
        )?;
        self.out.flush()
    }

    /// 读菜单编号；非数字或越界时报错并重新显示菜单。
    fn read_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            self.print_menu()?;
            let Some(token) = self.next_line_token()? else {
                return Ok(None);
            };
            if let Some(cmd) = token.parse::<i64>().ok().and_then(Command::from_number) {
                return Ok(Some(cmd));
            }
            writeln!(
                self.out,
                "Error! Input must be a number between {} and {}, or {} to exit.",
                Command::MIN_NUMBER,
                Command::MAX_NUMBER,
                Command::QUIT_NUMBER
            )?;
        }
    }

    /// 读要打开的词典编号；越界或已打开时重新提示。
    fn read_dictionary<S: Storage>(&mut self, session: &Session<S>) -> io::Result<Option<DictionaryId>> {
        let (min, max) = session.dictionary_range();
        loop {
            write!(
                self.out,
                "Which Dictionary should be opened? Enter a number between \"{min}\" and \"{max}\": "
            )?;
            self.out.flush()?;
            let Some(token) = self.next_line_token()? else {
                return Ok(None);
            };
            let choice = token
                .parse::<i64>()
                .map_err(|_| SelectionError::OutOfRange)
                .and_then(|n| session.choose_dictionary(n));
            match choice {
                Ok(id) => return Ok(Some(id)),
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }
    }

    /// 打印提示，读一个非空的词（取该行第一个空白分隔的 token）。
    fn read_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        loop {
            match self.next_line_token()? {
                None => return Ok(None),
                Some(token) if token.is_empty() => continue,
                Some(token) => return Ok(Some(token)),
            }
        }
    }

    /// 读一行并返回第一个 token（空行返回空串）；EOF 返回 `None`。
    fn next_line_token(&mut self) -> io::Result<Option<String>> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(
            self.line
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use tempfile::TempDir;
    use wordbook_file::DirStorage;

    use super::*;

    /// 在临时目录放好词典文件，按脚本输入跑完整个菜单，返回输出。
    fn run_script(files: &[(&str, &str)], script: &str) -> (String, Session<DirStorage>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).unwrap();
        }
        let mut session = Session::new(DirStorage::new(temp_dir.path()));
        let mut out = Vec::new();
        {
            let mut menu = Menu::new(
                Cursor::new(script.as_bytes()),
                &mut out,
                "dict-updated.txt".to_string(),
            );
            menu.open(&mut session, DictionaryId::default()).unwrap();
            menu.run(&mut session).unwrap();
        }
        (String::from_utf8(out).unwrap(), session, temp_dir)
    }

    const FRUIT: (&str, &str) = ("dictionary1.txt", "apple banana\ncherry\n");

    #[test]
    fn count_find_and_quit() {
        let (out, _, _dir) = run_script(&[FRUIT], "1\n3\nbanana\n3\napple\n3\nkiwi\n0\n");
        assert!(out.contains("(12) Write current dictionary to file"));
        assert!(out.contains("There are 3 words in dictionary #1."));
        assert!(out.contains("The previous word would be 'apple'."));
        assert!(out.contains("The next word would be 'cherry'."));
        assert!(out.contains("It is the first word."));
        assert!(out.contains("We did not find your word."));
        assert!(out.ends_with("Thank you! Bye!\n"));
    }

    #[test]
    fn invalid_choices_reprompt() {
        let (out, _, _dir) = run_script(&[FRUIT], "13\nabc\n\n-1\n1\n0\n");
        assert_eq!(
            out.matches("Error! Input must be a number between 1 and 12, or 0 to exit.")
                .count(),
            4
        );
        assert!(out.contains("There are 3 words in dictionary #1."));
    }

    #[test]
    fn delete_then_print() {
        let (out, session, _dir) = run_script(&[FRUIT], "4\nbanana\n2\n0\n");
        assert!(out.contains("The word 'banana' has been deleted."));
        assert!(out.contains("apple\ncherry\n"));
        assert_eq!(session.store().iter().collect::<Vec<_>>(), vec!["apple", "cherry"]);
    }

    #[test]
    fn stubs_are_coming_soon() {
        let (out, session, _dir) = run_script(&[FRUIT], "5\n6\n7\n8\n9\n10\n0\n");
        assert_eq!(out.matches("Coming soon!").count(), 6);
        assert_eq!(session.store().count(), 3);
    }

    #[test]
    fn load_rejects_open_and_out_of_range_dictionaries() {
        let (out, session, _dir) = run_script(
            &[FRUIT, ("dictionary2.txt", "x y z w\n")],
            "11\n1\n9\n2\n1\n0\n",
        );
        assert!(out.contains("That dictionary is already open! Pick another."));
        assert!(out.contains("That number is not in the available range! Pick another."));
        assert!(out.contains("Dictionary 2 is open."));
        assert!(out.contains("There are 4 words in dictionary #2."));
        assert_eq!(session.current(), DictionaryId::new(2));
    }

    #[test]
    fn missing_dictionary_keeps_current_words() {
        let (out, session, _dir) = run_script(&[FRUIT], "11\n3\n1\n0\n");
        assert!(out.contains("ERROR! Cannot read chosen dictionary \"dictionary3.txt\"."));
        assert!(out.contains("There are 3 words in dictionary #1."));
        assert_eq!(session.current(), DictionaryId::new(1));
    }

    #[test]
    fn missing_startup_dictionary_is_reported() {
        let (out, session, _dir) = run_script(&[], "1\n0\n");
        assert!(out.starts_with("ERROR! Cannot read chosen dictionary \"dictionary1.txt\"."));
        assert!(out.contains("There are 0 words; no dictionary is loaded."));
        assert!(!session.is_loaded());
    }

    #[test]
    fn write_to_default_and_named_files() {
        let (out, _, dir) = run_script(&[FRUIT], "12\nd\n12\nmine\n12\nd\n0\n");
        assert_eq!(
            fs::read_to_string(dir.path().join("dict-updated.txt")).unwrap(),
            "apple\nbanana\ncherry\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("mine.txt")).unwrap(),
            "apple\nbanana\ncherry\n"
        );
        assert!(out.contains("Error! The file dict-updated.txt already exists."));
    }

    #[test]
    fn end_of_input_quits() {
        let (out, _, _dir) = run_script(&[FRUIT], "3\n");
        assert!(out.ends_with("Thank you! Bye!\n"));
    }
}
