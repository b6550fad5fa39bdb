//! Logs every Bash tool call to `~/.claude/bash-all.log`.

use bash_hooks_core::HookKind;

fn main() {
    let exit = bash_hooks_cli::run_main(HookKind::AllCalls);
    std::process::exit(exit);
}
