use clap::CommandFactory;
use clap_complete::Shell;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Writes man pages to `<out>/man` and completions to `<out>/completions`.
/// `<out>` defaults to the current directory.
fn main() -> io::Result<()> {
    let out = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let man_dir = out.join("man");
    fs::create_dir_all(&man_dir)?;
    clap_mangen::generate_to(rootpatch::cli::Cli::command(), &man_dir)?;

    let completions_dir = out.join("completions");
    fs::create_dir_all(&completions_dir)?;
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        clap_complete::generate_to(
            shell,
            &mut rootpatch::cli::Cli::command(),
            "rootpatch",
            &completions_dir,
        )?;
    }

    for dir in [&man_dir, &completions_dir] {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            println!("Generated {}", entry.path().display());
        }
    }

    Ok(())
}
