use clap::error::ErrorKind;
use clap::Parser;
use codemeld::config::DEFAULT_MODEL;
use codemeld::logger::initialize_logger;
use codemeld::{meld_files_to_clipboard, MeldConfig};
use std::io;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "codemeld", author, version, about, long_about = None)]
struct CliArgs {
    /// All file paths in one shell-quoted string
    #[arg(allow_hyphen_values = true)]
    input: String,
    #[arg(short = 't', long, help = "Show token counts per file")]
    tokens: bool,
    #[arg(short = 'M', long, default_value = DEFAULT_MODEL)]
    model: String,
}

fn print_usage() {
    println!("用法 | Usage:");
    println!("  codemeld \"<file1> <file2> <file3> ...\"");
    println!("  codemeld -t \"<file1> <file2> ...\"   统计 token 数 | Show token counts");
    println!(
        "  codemeld -M <model>                指定 token 模型 | Model for token counts (default {})",
        DEFAULT_MODEL
    );
    println!("  codemeld -V                        输出版本号 | Print version");
    println!("\n描述 | Description:");
    println!("  将多个文件的内容以LLM更加容易理解的方式格式化并复制到剪贴板。");
    println!("  Format and copy the contents of multiple files to the clipboard in a way that is easier for LLMs to understand.");
    println!("\n示例 | Example:");
    println!("  codemeld \"./file1.txt /home/user/file2.py ~/file3.md\"");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli_args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    ExitCode::SUCCESS
                }
                ErrorKind::DisplayHelp => {
                    print_usage();
                    ExitCode::SUCCESS
                }
                _ => {
                    print_usage();
                    ExitCode::FAILURE
                }
            };
        }
    };
    initialize_logger();

    let config = MeldConfig {
        token_stats: cli_args.tokens,
        model: cli_args.model,
    };

    let mut stdout = io::stdout().lock();
    match meld_files_to_clipboard(config, &cli_args.input, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Meld failed: {:?}", e);
            println!("Error / 错误: {}", e);
            ExitCode::FAILURE
        }
    }
}
