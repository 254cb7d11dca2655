//! The built-in DevCLI demo script.

use super::{Script, ScriptEntry};

fn entry(command: &str, output: &[&str], post_typing_delay_ms: u64) -> ScriptEntry {
    ScriptEntry {
        command: command.to_string(),
        output: output.iter().map(|line| line.to_string()).collect(),
        post_typing_delay_ms,
    }
}

/// The scripted DevCLI session shown by the demo player.
///
/// Five entries: version check, project list, interactive task run,
/// environment status and an AI assistant answer.
pub fn devcli_demo() -> Script {
    Script::from_entries(vec![
        entry(
            "devcli --version",
            &["DevCLI v2.4.1 (stable)", "Built with Go 1.21.5 + Bubble Tea", ""],
            500,
        ),
        entry(
            "devcli project list",
            &[
                "Recent Projects:",
                "  📁 api-gateway      go         ~/work/api      (2 days ago)",
                "  📁 dashboard        react-ts   ~/work/dash     (3 days ago)",
                "  📁 ml-pipeline      python     ~/work/ml       (1 week ago)",
                "  📁 cli-tool         rust       ~/work/cli      (2 weeks ago)",
                "",
                "Use \"devcli project switch <name>\" to open a project",
                "",
            ],
            800,
        ),
        entry(
            "devcli run",
            &[
                "? Select task:",
                "  ❯ build    - Build the project",
                "    test     - Run test suite",
                "    lint     - Run linter",
                "    dev      - Start development server",
                "",
                "Running: build",
                "✓ Cleaning previous build...",
                "✓ Compiling TypeScript...",
                "✓ Bundling with Vite...",
                "✓ Build complete in 3.2s",
                "",
                "  dist/                     4.2 MB",
                "  ├── assets/               3.8 MB",
                "  ├── index.html            2.1 KB",
                "  └── manifest.json         456 B",
                "",
            ],
            1200,
        ),
        entry(
            "devcli env status",
            &[
                "Environment Status:",
                "",
                "  🐍 Python    3.11.4    ✓ active    (myproject)",
                "  ⬢ Node.js   20.5.0    ✓ active    (via nvm)",
                "  🐹 Go        1.21.5    ✓ system",
                "  🦀 Rust      1.74.0    ✓ system",
                "",
                "All environments are properly configured.",
                "",
            ],
            600,
        ),
        entry(
            "devcli ai \"explain this error\"",
            &[
                "🤖 AI Assistant",
                "",
                "I'll help you understand and fix this error.",
                "",
                "Error: \"cannot find module '@/components/ui'\"",
                "",
                "This is a path alias resolution issue. Here are the fixes:",
                "",
                "1. Check tsconfig.json paths configuration:",
                "   \"paths\": { \"@/*\": [\"./src/*\"] }",
                "",
                "2. Ensure your bundler (Vite/webpack) is configured",
                "   to resolve the alias.",
                "",
                "3. Restart your IDE after making changes.",
                "",
            ],
            1000,
        ),
    ])
}
