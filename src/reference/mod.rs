//! DevCLI reference content
//!
//! The command catalog shown next to the demo, with the same search and
//! category filtering, plus installation instructions (see [`install`]).

pub mod install;

use serde::Serialize;

/// Category value that matches every command.
pub const ALL_CATEGORIES: &str = "All";

/// An example invocation with a short explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub cmd: &'static str,
    pub desc: &'static str,
}

/// A command-line flag with a short explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub flag: &'static str,
    pub desc: &'static str,
}

/// One DevCLI command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub examples: &'static [Example],
    pub flags: &'static [Flag],
    pub category: &'static str,
}

const fn ex(cmd: &'static str, desc: &'static str) -> Example {
    Example { cmd, desc }
}

const fn fl(flag: &'static str, desc: &'static str) -> Flag {
    Flag { flag, desc }
}

/// The full command catalog, in display order.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "project",
        description: "Manage projects with scaffolding, templates, and history tracking",
        usage: "devcli project <subcommand> [options]",
        examples: &[
            ex("devcli project new my-app --template react-ts", "Create a new project from template"),
            ex("devcli project list", "List recent projects"),
            ex("devcli project switch my-app", "Switch to a project"),
            ex("devcli project clone https://github.com/user/repo", "Clone and setup a project"),
        ],
        flags: &[
            fl("--template, -t", "Specify project template"),
            fl("--path, -p", "Custom project path"),
            fl("--git", "Initialize git repository"),
        ],
        category: "Project",
    },
    Command {
        name: "run",
        description: "Execute build, test, and lint commands with auto-detection",
        usage: "devcli run [task] [options]",
        examples: &[
            ex("devcli run", "Interactive task selector"),
            ex("devcli run build", "Run build task"),
            ex("devcli run test --watch", "Run tests in watch mode"),
            ex("devcli run lint --fix", "Run linter with auto-fix"),
        ],
        flags: &[
            fl("--watch, -w", "Watch mode for supported tasks"),
            fl("--parallel", "Run tasks in parallel"),
            fl("--env", "Specify environment variables"),
        ],
        category: "Task",
    },
    Command {
        name: "env",
        description: "Manage virtual environments for Python, Node.js, and more",
        usage: "devcli env <subcommand> [options]",
        examples: &[
            ex("devcli env list", "List all environments"),
            ex("devcli env create python 3.11", "Create Python virtualenv"),
            ex("devcli env activate myenv", "Activate an environment"),
            ex("devcli env status", "Show environment status"),
        ],
        flags: &[
            fl("--name, -n", "Environment name"),
            fl("--version, -v", "Language version"),
            fl("--requirements", "Requirements file path"),
        ],
        category: "Environment",
    },
    Command {
        name: "serve",
        description: "Start development server with auto-detection and live reload",
        usage: "devcli serve [options]",
        examples: &[
            ex("devcli serve", "Start dev server with auto-detection"),
            ex("devcli serve --port 3000", "Start on specific port"),
            ex("devcli serve --https", "Enable HTTPS"),
            ex("devcli serve --proxy /api:http://localhost:8080", "Configure proxy"),
        ],
        flags: &[
            fl("--port, -p", "Server port (default: auto)"),
            fl("--host, -h", "Server host (default: localhost)"),
            fl("--https", "Enable HTTPS"),
            fl("--proxy", "Proxy configuration"),
        ],
        category: "Server",
    },
    Command {
        name: "create",
        description: "Generate files from templates (Dockerfile, CI/CD, configs)",
        usage: "devcli create <template> [options]",
        examples: &[
            ex("devcli create", "Interactive file creator"),
            ex("devcli create dockerfile --lang go", "Generate Dockerfile"),
            ex("devcli create ci --provider github", "Generate CI/CD workflow"),
            ex("devcli create makefile --type node", "Generate Makefile"),
        ],
        flags: &[
            fl("--lang, -l", "Programming language"),
            fl("--provider", "CI/CD provider (github, gitlab, etc.)"),
            fl("--output, -o", "Output file path"),
        ],
        category: "File",
    },
    Command {
        name: "gen",
        description: "Generate code snippets and architectural patterns",
        usage: "devcli gen <type> [options]",
        examples: &[
            ex("devcli gen api --resource user", "Generate API endpoints"),
            ex("devcli gen crud --orm gorm", "Generate CRUD operations"),
            ex("devcli gen model --fields \"name:string,age:int\"", "Generate data models"),
            ex("devcli gen test --coverage", "Generate test files"),
        ],
        flags: &[
            fl("--resource, -r", "Resource name"),
            fl("--orm", "ORM framework"),
            fl("--fields, -f", "Field definitions"),
            fl("--coverage", "Include coverage reports"),
        ],
        category: "Generator",
    },
    Command {
        name: "snippet",
        description: "Manage your personal code snippet library",
        usage: "devcli snippet <subcommand> [options]",
        examples: &[
            ex("devcli snippet add", "Add a new snippet"),
            ex("devcli snippet list", "List all snippets"),
            ex("devcli snippet search \"auth\"", "Search snippets"),
            ex("devcli snippet get jwt-auth", "Get snippet content"),
        ],
        flags: &[
            fl("--name, -n", "Snippet name"),
            fl("--lang, -l", "Programming language"),
            fl("--tags, -t", "Comma-separated tags"),
        ],
        category: "Snippet",
    },
    Command {
        name: "ai",
        description: "AI-powered coding assistant for help and debugging",
        usage: "devcli ai [query] [options]",
        examples: &[
            ex("devcli ai", "Start interactive AI session"),
            ex("devcli ai \"explain this error\"", "Get help with an error"),
            ex("devcli ai --file main.go", "Analyze a file"),
            ex("devcli ai --context \"I'm building a REST API\"", "Set context"),
        ],
        flags: &[
            fl("--file, -f", "File to analyze"),
            fl("--context, -c", "Set conversation context"),
            fl("--model, -m", "AI model to use"),
        ],
        category: "AI",
    },
    Command {
        name: "files",
        description: "Keyboard-driven file manager and quick editor",
        usage: "devcli files [path] [options]",
        examples: &[
            ex("devcli files", "Open file manager in current directory"),
            ex("devcli files ~/projects", "Open specific directory"),
            ex("devcli files --preview", "Enable file preview"),
            ex("devcli files --search", "Start in search mode"),
        ],
        flags: &[
            fl("--preview, -p", "Enable file preview"),
            fl("--search, -s", "Start in search mode"),
            fl("--hidden, -a", "Show hidden files"),
        ],
        category: "File Manager",
    },
    Command {
        name: "update",
        description: "Check and install updates for DevCLI and managed tools",
        usage: "devcli update [subcommand] [options]",
        examples: &[
            ex("devcli update check", "Check for available updates"),
            ex("devcli update", "Update DevCLI to latest version"),
            ex("devcli update all", "Update all managed tools"),
            ex("devcli update go node", "Update specific tools"),
        ],
        flags: &[
            fl("--force, -f", "Force update without confirmation"),
            fl("--dry-run", "Show what would be updated"),
            fl("--rollback", "Rollback to previous version"),
        ],
        category: "Update",
    },
];

/// Category names: `All` first, then each category in order of first
/// appearance in the catalog.
pub fn categories() -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for command in COMMANDS {
        if !out.contains(&command.category) {
            out.push(command.category);
        }
    }
    out
}

impl Command {
    /// Case-insensitive substring match on name or description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Exact category match; `All` matches everything.
    pub fn in_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

/// Commands matching both the search query and the category.
///
/// An empty query matches everything.
pub fn filter_commands(query: &str, category: &str) -> Vec<&'static Command> {
    COMMANDS
        .iter()
        .filter(|c| c.matches_query(query) && c.in_category(category))
        .collect()
}

/// Look up a command by exact name.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}
