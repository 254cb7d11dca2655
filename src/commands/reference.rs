//! Commands (reference) handler

use std::path::Path;

use anyhow::{bail, Result};
use unicode_width::UnicodeWidthStr;

use devcli_demo::cli::CommandsArgs;
use devcli_demo::reference::{categories, filter_commands, Command, ALL_CATEGORIES};
use devcli_demo::tui::current_theme;

use super::{load_config, print_footer, stdout_is_tty, styled};

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &CommandsArgs, config_path: Option<&Path>) -> Result<()> {
    load_config(config_path)?;
    let theme = current_theme();
    let colored = stdout_is_tty();

    if args.categories {
        for category in categories() {
            println!("{}", category);
        }
        return Ok(());
    }

    let category = args.category.as_deref().unwrap_or(ALL_CATEGORIES);
    let known = categories();
    if !known.contains(&category) {
        bail!(
            "Unknown category '{}'. Available: {}",
            category,
            known.join(", ")
        );
    }

    let query = args.query.as_deref().unwrap_or("");
    let matches = filter_commands(query, category);

    match matches.as_slice() {
        [] => println!(
            "{}",
            styled(colored, &format!("No commands match '{}'", query), |t| theme.secondary_text(t))
        ),
        [single] => print!("{}", format_details(single, colored)),
        many => {
            for line in format_list(many, colored) {
                println!("{}", line);
            }
        }
    }
    print_footer();
    Ok(())
}

/// One row per command: padded name, category tag, description.
pub fn format_list(commands: &[&Command], colored: bool) -> Vec<String> {
    let theme = current_theme();
    let name_width = commands.iter().map(|c| c.name.width()).max().unwrap_or(0);
    let tag_width = commands.iter().map(|c| c.category.width() + 2).max().unwrap_or(0);
    commands
        .iter()
        .map(|c| {
            let tag = format!("[{}]", c.category);
            format!(
                "{}{}  {}{}  {}",
                styled(colored, c.name, |t| theme.accent_text(t)),
                " ".repeat(name_width - c.name.width()),
                styled(colored, &tag, |t| theme.secondary_text(t)),
                " ".repeat(tag_width - tag.width()),
                c.description
            )
        })
        .collect()
}

/// Full reference page for one command.
pub fn format_details(command: &Command, colored: bool) -> String {
    let theme = current_theme();
    let mut out = String::new();
    out.push_str(&format!(
        "{}  [{}]\n",
        styled(colored, command.name, |t| theme.accent_text(t)),
        command.category
    ));
    out.push_str(&format!("{}\n\n", command.description));
    out.push_str(&format!("Usage: {}\n\n", command.usage));

    out.push_str("Examples:\n");
    let cmd_width = command.examples.iter().map(|e| e.cmd.width()).max().unwrap_or(0);
    for example in command.examples {
        let pad = " ".repeat(cmd_width - example.cmd.width());
        out.push_str(&format!(
            "  {}{}  {}\n",
            styled(colored, &format!("$ {}", example.cmd), |t| theme.primary_text(t)),
            pad,
            styled(colored, example.desc, |t| theme.secondary_text(t))
        ));
    }

    out.push_str("\nFlags:\n");
    let flag_width = command.flags.iter().map(|f| f.flag.width()).max().unwrap_or(0);
    for flag in command.flags {
        let pad = " ".repeat(flag_width - flag.flag.width());
        out.push_str(&format!("  {}{}  {}\n", flag.flag, pad, flag.desc));
    }
    out
}
