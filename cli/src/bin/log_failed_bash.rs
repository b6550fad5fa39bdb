//! Logs failed Bash tool calls to `~/.claude/bash-failures.log`.

use bash_hooks_core::HookKind;

fn main() {
    let exit = bash_hooks_cli::run_main(HookKind::Failures);
    std::process::exit(exit);
}
