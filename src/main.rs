use std::env;
use std::io::{self, BufRead};
use std::process;

use nu_ansi_term::Color::{Cyan, Yellow};
#[cfg(feature = "interactive")]
use rustyline::error::ReadlineError;

use debilinguify::config::Config;
use debilinguify::precondition;
use debilinguify::util::{disable_colors, error_exit, error_message};
use debilinguify::{normalize, Bias};

#[derive(Debug, Default, PartialEq)]
struct Options {
    bias: Option<Bias>,
    check: bool,
    no_color: bool,
    interactive: bool,
    help: bool,
    text: Vec<String>,
}

struct Settings {
    bias: Bias,
    check: bool,
}

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => error_exit("dbl", &err),
    };

    let config = Config::new().unwrap_or_else(|err| {
        error_message("config", &err);
        Config::default()
    });

    if options.no_color || config.no_color {
        disable_colors();
    }

    if options.help {
        usage_info(!options.no_color && !config.no_color);
        return;
    }

    if let Err(err) = config.save() {
        error_message("config", &err);
    }

    let settings = Settings {
        bias: options.bias.unwrap_or(config.bias),
        check: options.check || config.check_input,
    };

    let ok = if options.interactive {
        interactive(&settings)
    } else if !options.text.is_empty() {
        process_line(&options.text.join(" "), &settings)
    } else {
        process_stdin(&settings)
    };

    if !ok {
        process::exit(1);
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if !options.text.is_empty() {
            options.text.push(arg);
            continue;
        }

        match arg.as_str() {
            "--bias" | "-b" => match args.next() {
                Some(name) => options.bias = Some(Bias::from_name(&name)),
                None => return Err(format!("{} requires a value", arg)),
            },
            "--check" | "-c" => options.check = true,
            "--no-color" => options.no_color = true,
            "--interactive" | "-i" => options.interactive = true,
            "--help" | "-h" => options.help = true,
            "--" => options.text.extend(args.by_ref()),
            _ if arg.starts_with("--bias=") => {
                options.bias = Some(Bias::from_name(&arg["--bias=".len()..]))
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option {}", arg));
            }
            _ => options.text.push(arg),
        }
    }

    Ok(options)
}

fn process_line(line: &str, settings: &Settings) -> bool {
    match normalize_line(line, settings) {
        Ok(result) => {
            println!("{}", result);
            true
        }
        Err(err) => {
            error_message(line, &err);
            false
        }
    }
}

fn normalize_line(line: &str, settings: &Settings) -> Result<String, String> {
    if settings.check {
        precondition::check(line).map_err(|err| err.to_string())?;
    }

    Ok(normalize(line, settings.bias))
}

fn process_stdin(settings: &Settings) -> bool {
    let mut ok = true;

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => ok &= process_line(&line, settings),
            Err(err) => error_exit("stdin", &err.to_string()),
        }
    }

    ok
}

#[cfg(feature = "interactive")]
fn interactive(settings: &Settings) -> bool {
    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => error_exit("interactive", &err.to_string()),
    };

    let mut ok = true;

    loop {
        match rl.readline("dbl> ") {
            Ok(line) => {
                let command = line.trim();
                if command == "quit" || command == "exit" {
                    break;
                }
                if command.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line.as_str());
                ok &= process_line(&line, settings);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                error_message("interactive", &err.to_string());
                return false;
            }
        }
    }

    ok
}

#[cfg(not(feature = "interactive"))]
fn interactive(_settings: &Settings) -> bool {
    error_exit("dbl", "interactive mode is not available in this build")
}

fn usage_info(colors: bool) {
    let version = env!("CARGO_PKG_VERSION");
    let url = "https://github.com/debilinguify/debilinguify";

    if colors {
        println!("dbl utility v{}", Yellow.paint(version));
    } else {
        println!("dbl utility v{}", version);
    }
    println!("Normalizes uppercase text mixing Latin and Greek letters into one charset.");
    if colors {
        println!("{}", Cyan.paint(url));
    } else {
        println!("{}", url);
    }
    println!();
    println!("Usage: dbl [OPTIONS] [TEXT...]");
    println!();
    println!("Reads lines from stdin when no TEXT is given.");
    println!();
    println!("Options:");
    println!("  -b, --bias <greek|latin|none>  Charset for words mixing both alphabets");
    println!("  -c, --check                    Reject lowercase and accented input");
    println!("      --no-color                 Plain error messages");
    println!("  -i, --interactive              Normalize lines as you type them");
    println!("  -h, --help                     Show this help");
}
