use std::fmt::{self, Write};

use super::types::Command;

/// Whether a final parameter must be written with a leading colon.
fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Write a parameter, flattening anything that would end the line early.
fn write_param(f: &mut fmt::Formatter<'_>, param: &str) -> fmt::Result {
    for c in param.chars() {
        match c {
            '\r' | '\n' | '\0' => f.write_char(' ')?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Write `cmd args...`, adding a colon to the last arg only when required.
fn write_cmd<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cmd: &str, args: &[S]) -> fmt::Result {
    f.write_str(cmd)?;
    let len = args.len();
    for (i, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        f.write_char(' ')?;
        if i + 1 == len && needs_colon_prefix(arg) {
            f.write_char(':')?;
        }
        write_param(f, arg)?;
    }
    Ok(())
}

/// Write `cmd args... :last`, always treating the last arg as trailing text.
fn write_cmd_freeform<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cmd: &str,
    args: &[S],
) -> fmt::Result {
    match args.split_last() {
        Some((suffix, middle)) => {
            f.write_str(cmd)?;
            for arg in middle {
                f.write_char(' ')?;
                write_param(f, arg.as_ref())?;
            }
            f.write_str(" :")?;
            write_param(f, suffix.as_ref())
        }
        None => f.write_str(cmd),
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PRIVMSG(t, m) => write_cmd_freeform(f, "PRIVMSG", &[t, m]),
            Command::NOTICE(t, m) => write_cmd_freeform(f, "NOTICE", &[t, m]),
            Command::JOIN(c, Some(k)) => write_cmd(f, "JOIN", &[c, k]),
            Command::JOIN(c, None) => write_cmd(f, "JOIN", &[c]),
            Command::PART(c, Some(m)) => write_cmd_freeform(f, "PART", &[c, m]),
            Command::PART(c, None) => write_cmd(f, "PART", &[c]),
            Command::NICK(n) => write_cmd(f, "NICK", &[n]),
            Command::USER(u, m, r) => {
                write_cmd_freeform(f, "USER", &[u.as_str(), m.as_str(), "*", r.as_str()])
            }
            Command::PING(s, Some(t)) => write_cmd_freeform(f, "PING", &[s, t]),
            Command::PING(s, None) => write_cmd(f, "PING", &[s]),
            Command::PONG(s, Some(t)) => write_cmd_freeform(f, "PONG", &[s, t]),
            Command::PONG(s, None) => write_cmd(f, "PONG", &[s]),
            Command::QUIT(Some(m)) => write_cmd_freeform(f, "QUIT", &[m]),
            Command::QUIT(None) => f.write_str("QUIT"),
            Command::MODE(t, modes) => {
                let mut args = Vec::with_capacity(modes.len() + 1);
                args.push(t.as_str());
                args.extend(modes.iter().map(String::as_str));
                write_cmd(f, "MODE", &args)
            }
            Command::WHO(Some(m)) => write_cmd(f, "WHO", &[m]),
            Command::WHO(None) => f.write_str("WHO"),
            Command::TOPIC(c, Some(t)) => write_cmd_freeform(f, "TOPIC", &[c, t]),
            Command::TOPIC(c, None) => write_cmd(f, "TOPIC", &[c]),
            Command::NAMES(Some(c)) => write_cmd(f, "NAMES", &[c]),
            Command::NAMES(None) => f.write_str("NAMES"),
            Command::KICK(c, n, Some(r)) => write_cmd_freeform(f, "KICK", &[c, n, r]),
            Command::KICK(c, n, None) => write_cmd(f, "KICK", &[c, n]),
            Command::Response(resp, params) => {
                let code = resp.to_string();
                if resp.has_trailing_text() && params.len() > 1 {
                    write_cmd_freeform(f, &code, params)
                } else {
                    write_cmd(f, &code, params)
                }
            }
            Command::Raw(verb, params) => write_cmd(f, verb, params),
        }
    }
}
