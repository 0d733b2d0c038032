mod args;
mod menu;

use std::io;

use clap::Parser;
use log::info;
use wordbook_core::session::Session;
use wordbook_file::DirStorage;

use crate::{args::Args, menu::Menu};

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let storage = DirStorage::new(&args.dict_dir);
    let mut session = Session::new(storage);
    let startup = args.dictionary;
    info!(
        "wordbook starting in {} with dictionary {startup}",
        args.dict_dir.display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), args.output);
    menu.open(&mut session, startup)?;
    menu.run(&mut session)
}

/// 日志走 stderr，不和菜单输出混在一起；`RUST_LOG` 优先。
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
