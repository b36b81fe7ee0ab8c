// End-to-end tests for the portfolio shell

use std::sync::Arc;

use folioterm::render::LineKind;
use folioterm::shell::{dispatch, Session, Signal};
use folioterm::vfs::{VfsPath, VirtualFs};
use pretty_assertions::assert_eq;

fn fresh() -> Session {
    Session::empty(Arc::new(VirtualFs::new()))
}

/// Run a sequence of command lines, returning the session and the lines
/// emitted by the last one
fn run(commands: &[&str]) -> (Session, Vec<String>) {
    let mut session = fresh();
    let mut last = Vec::new();
    for cmd in commands {
        let (next, lines) = dispatch(session, cmd);
        session = next;
        last = lines.iter().map(|l| l.text().to_string()).collect();
    }
    (session, last)
}

#[test]
fn test_cd_into_project_and_list() {
    let (session, lines) = run(&["cd projects", "cd drai-ai", "ls"]);
    assert_eq!(session.current_path().to_string(), "~/projects/drai-ai");
    assert_eq!(lines, vec!["README.md  details.txt".to_string()]);
}

#[test]
fn test_cd_nonexistent_keeps_root() {
    let (session, lines) = run(&["cd nonexistent"]);
    assert!(session.current_path().is_root());
    assert_eq!(
        lines,
        vec!["cd: nonexistent: No such file or directory".to_string()]
    );
    let last = session.log().last().unwrap();
    assert_eq!(last.kind(), LineKind::Error);
}

#[test]
fn test_cat_about_mentions_name() {
    let (_, lines) = run(&["cat about.txt"]);
    assert!(!lines.is_empty());
    assert!(lines.iter().any(|l| l.contains("SWAYAM")));
}

#[test]
fn test_cat_skill_notes() {
    let (session, lines) = run(&["cd skills/ai-ml-deep-learning", "cat PyTorch.txt"]);
    assert_eq!(
        session.current_path().to_string(),
        "~/skills/ai-ml-deep-learning"
    );
    assert!(lines
        .iter()
        .any(|l| l == "Deep learning framework for building neural networks"));

    let (_, lines) = dispatch(session, "cat Unknown.txt");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_error());
    assert!(lines[0].text().starts_with("cat:"));
}

#[test]
fn test_leading_slash_means_the_same_for_cd_and_cat() {
    let (session, _) = run(&["cd projects/tara", "cd /"]);
    assert_eq!(session.current_path().to_string(), "~/projects/tara");

    let (session, readme) = dispatch(session, "cat /README.md");
    assert!(readme.iter().all(|l| !l.is_error()));
    let (session, dotted) = dispatch(session, "cat ./README.md");
    assert_eq!(
        readme.iter().map(|l| l.text()).collect::<Vec<_>>(),
        dotted.iter().map(|l| l.text()).collect::<Vec<_>>()
    );

    let (_, lines) = dispatch(session, "cat /about.txt");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "cat: /about.txt: No such file or directory");
}

#[test]
fn test_tab_separated_argument() {
    let (session, lines) = run(&["cd\tskills", "ls\tedge-ai-iot"]);
    assert_eq!(session.current_path().to_string(), "~/skills");
    assert!(lines[0].contains("CoreML.txt"));
}

#[test]
fn test_skill_without_stored_description_uses_fallback() {
    let (_, lines) = run(&["cat ~/skills/ai-ml-deep-learning/YOLOv8.txt"]);
    assert!(lines
        .iter()
        .any(|l| l == "Advanced proficiency in this technology"));
}

#[test]
fn test_history_recall_walks_back_and_stops() {
    let (mut session, _) = run(&["ls", "whois"]);
    session.recall_older();
    assert_eq!(session.input(), "whois");
    session.recall_older();
    assert_eq!(session.input(), "ls");
    session.recall_older();
    assert_eq!(session.input(), "ls");

    session.recall_newer();
    assert_eq!(session.input(), "whois");
    session.recall_newer();
    assert_eq!(session.input(), "");
    assert_eq!(session.history_cursor(), None);
}

#[test]
fn test_history_counts_only_non_blank_lines() {
    let (session, _) = run(&["ls", "", "whois", "   ", "bogus", "clear"]);
    assert_eq!(session.command_history().len(), 4);
    assert_eq!(session.command_history()[2], "bogus");
}

#[test]
fn test_clear_always_empties_log() {
    let (session, _) = run(&["help", "skills", "projects", "experience"]);
    assert!(session.log().len() > 20);
    let (session, lines) = dispatch(session, "clear");
    assert!(lines.is_empty());
    assert_eq!(session.log().len(), 0);

    let session = Session::new(Arc::new(VirtualFs::new()));
    let (session, _) = dispatch(session, "clear");
    assert_eq!(session.log().len(), 0);
}

#[test]
fn test_unknown_commands_emit_single_error() {
    for cmd in ["foo", "sudo", "rm -rf /", "LSX"] {
        let (session, lines) = dispatch(fresh(), cmd);
        assert_eq!(lines.len(), 1, "{}", cmd);
        assert_eq!(lines[0].kind(), LineKind::Error);
        assert_eq!(session.log().len(), 2);
        let token = cmd.split(' ').next().unwrap();
        assert!(
            lines[0]
                .text()
                .contains(&format!("Command not found: {}", token)),
            "{}",
            lines[0].text()
        );
    }
}

#[test]
fn test_echo_line_carries_prompt() {
    let (session, _) = run(&["cd projects", "ls"]);
    let echoes: Vec<&str> = session
        .log()
        .iter()
        .filter(|l| l.kind() == LineKind::Command)
        .map(|l| l.text())
        .collect();
    assert_eq!(echoes, vec!["~ $ cd projects", "~/projects $ ls"]);
}

#[test]
fn test_exit_raises_signal() {
    let (mut session, lines) = run(&["exit"]);
    assert!(!lines.is_empty());
    assert_eq!(session.take_signal(), Some(Signal::Exit));
    assert_eq!(session.take_signal(), None);
}

#[test]
fn test_tab_completion_then_submit() {
    let mut session = fresh();
    for c in "who".chars() {
        session.push_char(c);
    }
    session.complete();
    assert_eq!(session.input(), "whois");
    let (session, lines) = session.submit();
    assert!(lines.iter().any(|l| l.text().contains("Swayam Prakash Sahoo")));
    assert_eq!(session.input(), "");
}

/// Walk every directory by cd-ing one segment at a time from root and check
/// that the resolver agrees with the static tree
#[test]
fn test_every_directory_reachable_by_segments() {
    let fs = Arc::new(VirtualFs::new());
    let dirs: Vec<VfsPath> = fs.directories().cloned().collect();
    assert!(dirs.len() > 10);

    for dir in dirs {
        let mut session = Session::empty(Arc::clone(&fs));
        for segment in dir.segments() {
            let (next, lines) = dispatch(session, &format!("cd {}", segment));
            assert!(lines.is_empty(), "cd {} failed on the way to {}", segment, dir);
            session = next;
        }
        assert_eq!(session.current_path(), &dir);

        let joined = dir.segments().join("/");
        let resolved = fs.resolve(&VfsPath::root(), &joined).unwrap();
        assert_eq!(resolved, dir);

        let (_, lines) = dispatch(session, "ls");
        assert!(lines.iter().all(|l| !l.is_error()), "ls failed in {}", dir);
    }
}

#[test]
fn test_parent_at_root_stays_root() {
    let fs = VirtualFs::new();
    let root = VfsPath::root();
    assert_eq!(fs.resolve(&root, "..").unwrap(), root);
    assert_eq!(fs.resolve(&root, "../../..").unwrap(), root);
}
