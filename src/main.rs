use clap::{Parser, Subcommand};
use saltbox::cli::{
    decrypt_file, detect_mode, encrypt_file, show_info, DecryptOptions, EncryptOptions,
};
use saltbox::pipeline::cipher::Mode;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("SALTBOX_VERSION");
const BUILD: &str = env!("SALTBOX_BUILD");
const PROFILE: &str = env!("SALTBOX_PROFILE");
const GIT_HASH: &str = env!("SALTBOX_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "saltbox")]
#[command(author, about = "Salted AES-CBC file container with HMAC authentication", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file into a container
    #[command(alias = "e")]
    Encrypt {
        /// File to encrypt
        input: PathBuf,

        /// Internal path bound into key derivation (e.g. "strings/english.lang")
        context: String,

        /// Output container (defaults to <INPUT>.bfile)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Decrypt a container back into its payload
    #[command(alias = "d")]
    Decrypt {
        /// Container file to decrypt
        input: PathBuf,

        /// Internal path used when the container was sealed
        context: String,

        /// Output file (defaults to <INPUT>.dec)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Pick encrypt or decrypt from the file extension (.dec encrypts)
    #[command(alias = "a")]
    Auto {
        /// File to transform
        input: PathBuf,

        /// Internal path bound into key derivation
        context: String,
    },

    /// Show the field layout of a container file
    #[command(alias = "i")]
    Info {
        /// Container file to inspect
        file: PathBuf,
    },
}

fn default_output_path(input: &PathBuf, suffix: &str) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

fn run_encrypt(input: PathBuf, context: String, output: Option<PathBuf>) -> saltbox::Result<()> {
    let output_path = output.unwrap_or_else(|| default_output_path(&input, ".bfile"));
    let options = EncryptOptions { context };
    let written = encrypt_file(&input, &output_path, &options)?;
    println!("Encrypted {} bytes to {}", written, output_path.display());
    Ok(())
}

fn run_decrypt(input: PathBuf, context: String, output: Option<PathBuf>) -> saltbox::Result<()> {
    let output_path = output.unwrap_or_else(|| default_output_path(&input, ".dec"));
    let options = DecryptOptions { context };
    let outcome = decrypt_file(&input, &output_path, &options)?;
    if !outcome.verification.is_verified() {
        eprintln!("Warning: HMAC tag mismatch, decrypted data might not be valid!");
    }
    println!(
        "Decrypted {} bytes to {}",
        outcome.bytes_written,
        output_path.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("saltbox {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            input,
            context,
            output,
        } => run_encrypt(input, context, output),

        Commands::Decrypt {
            input,
            context,
            output,
        } => run_decrypt(input, context, output),

        Commands::Auto { input, context } => match detect_mode(&input) {
            Mode::Encrypt => run_encrypt(input, context, None),
            Mode::Decrypt => run_decrypt(input, context, None),
        },

        Commands::Info { file } => match show_info(&file) {
            Ok(info) => {
                print!("{}", info);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
