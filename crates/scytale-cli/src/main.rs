//! Scytale CLI - a pluggable text-transformation toolkit
//!
//! This is the command-line interface for Scytale. It collects the cipher
//! selection and parameters, hands them to the core dispatch layer, and
//! prints the result or a structured error verbatim.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use scytale_core::{apply, share, CipherId, Mode, RawParams, VERSION};
use zeroize::Zeroizing;

/// Scytale - reversible text ciphers and password-based encryption
#[derive(Parser)]
#[command(name = "scytale")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt (or encode) text with the selected cipher
    Encrypt {
        /// Cipher to use (caesar, vigenere, xor, base64, aesgcm)
        #[arg(short, long, default_value = "caesar")]
        cipher: String,

        /// Text to transform (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Shift amount for caesar
        #[arg(long)]
        shift: Option<String>,

        /// Key for vigenere/xor
        #[arg(long)]
        key: Option<String>,
    },

    /// Decrypt (or decode) text with the selected cipher
    Decrypt {
        /// Cipher to use (caesar, vigenere, xor, base64, aesgcm)
        #[arg(short, long, default_value = "caesar")]
        cipher: String,

        /// Text to transform (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Shift amount for caesar
        #[arg(long)]
        shift: Option<String>,

        /// Key for vigenere/xor
        #[arg(long)]
        key: Option<String>,
    },

    /// Build a share token for a cipher selection (passwords are never included)
    Share {
        /// Direction the recipient should run (encrypt, decrypt)
        #[arg(short, long, default_value = "encrypt")]
        mode: String,

        /// Cipher to use (caesar, vigenere, xor, base64, aesgcm)
        #[arg(short, long, default_value = "caesar")]
        cipher: String,

        /// Text to embed (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Shift amount for caesar
        #[arg(long)]
        shift: Option<String>,

        /// Key for vigenere/xor
        #[arg(long)]
        key: Option<String>,
    },

    /// Decode a share token and show the cipher selection it carries
    Load {
        /// The share token
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt {
            cipher,
            text,
            shift,
            key,
        } => run_transform(Mode::Encrypt, &cipher, text, shift, key)?,
        Commands::Decrypt {
            cipher,
            text,
            shift,
            key,
        } => run_transform(Mode::Decrypt, &cipher, text, shift, key)?,
        Commands::Share {
            mode,
            cipher,
            text,
            shift,
            key,
        } => {
            let mode = parse_mode(&mode)?;
            let cipher: CipherId = cipher.parse()?;
            let text = read_text(text)?;
            let raw = RawParams {
                shift,
                key,
                password: None,
            };
            let envelope = share::ShareEnvelope::new(mode, cipher, &raw, &text);
            println!("{}", share::encode(&envelope));
        }
        Commands::Load { token } => {
            let envelope = share::decode(token.trim())?;
            if envelope.cipher == CipherId::AesGcm {
                eprintln!(
                    "Note: share tokens never contain the AES password; \
                     decryption will still require it."
                );
            }
            if !cli.quiet {
                println!("Mode: {}", envelope.mode);
                println!("Cipher: {}", envelope.cipher);
                if let Some(shift) = &envelope.params.shift {
                    println!("Shift: {}", shift);
                }
                if let Some(key) = &envelope.params.key {
                    println!("Key: {}", key);
                }
                println!();
            }
            println!("{}", envelope.input);
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "scytale", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn run_transform(
    mode: Mode,
    cipher: &str,
    text: Option<String>,
    shift: Option<String>,
    key: Option<String>,
) -> anyhow::Result<()> {
    let cipher: CipherId = cipher.parse()?;
    let text = read_text(text)?;

    let password = if cipher == CipherId::AesGcm {
        Some(obtain_password(mode)?)
    } else {
        None
    };
    let raw = RawParams {
        shift,
        key,
        password: password.as_ref().map(|pw| pw.to_string()),
    };

    let output = apply(cipher, mode, &raw, &text)?;
    println!("{}", output);
    Ok(())
}

/// Read the password from `SCYTALE_PASSWORD` or prompt for it.
///
/// Encryption prompts twice (a typo here means the data is gone);
/// decryption prompts once so retries stay cheap.
fn obtain_password(mode: Mode) -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("SCYTALE_PASSWORD") {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }

    let prompt = match mode {
        Mode::Encrypt => Password::new()
            .with_prompt("Enter password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact(),
        Mode::Decrypt => Password::new().with_prompt("Password").interact(),
    };
    prompt
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

fn parse_mode(value: &str) -> anyhow::Result<Mode> {
    match value {
        "encrypt" => Ok(Mode::Encrypt),
        "decrypt" => Ok(Mode::Decrypt),
        other => Err(anyhow::anyhow!(
            "Invalid mode: {} (use encrypt or decrypt)",
            other
        )),
    }
}

fn read_text(text: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = text {
        return Ok(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end().to_string();
        if trimmed.is_empty() {
            return Err(anyhow::anyhow!("No input provided on stdin"));
        }
        return Ok(trimmed);
    }

    Err(anyhow::anyhow!(
        "No text provided. Pass it as an argument or pipe it via stdin."
    ))
}
