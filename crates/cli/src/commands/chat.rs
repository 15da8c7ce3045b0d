//! `toolpilot chat` — Interactive or single-message chat mode.
//!
//! Renders each reply followed by the tool trace: one card per step
//! with title, reasoning, input, and output.

use chrono::Local;
use toolpilot_agent::Agent;
use toolpilot_core::step::AgentResult;

pub fn run(message: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let agent = Agent::default();

    if let Some(msg) = message {
        let msg = msg.trim();
        if msg.is_empty() {
            return Err("Message must not be empty.".into());
        }
        print_result(&agent.run(msg));
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║        Toolpilot — Interactive Mode          ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Tools: calculator, weather desk, knowledge base, idea sparks");
    println!("  Ask me to crunch numbers, check a weather snapshot,");
    println!("  look up a topic, or brainstorm a plan.");
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("  You > ");
        use std::io::Write;
        std::io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        print_result(&agent.run(input));
    }

    println!("  Bye!");
    Ok(())
}

fn print_result(result: &AgentResult) {
    let stamp = Local::now().format("%H:%M");
    println!();
    println!("  Agent [{stamp}]");
    for line in result.reply.lines() {
        println!("  {line}");
    }

    if !result.steps.is_empty() {
        println!();
        println!("  ── Tool trace ──");
        for step in &result.steps {
            println!("  [{}]", step.title);
            println!("    Reasoning: {}", step.reasoning);
            println!("    Input:     {}", step.input);
            for (i, line) in step.output.lines().enumerate() {
                if i == 0 {
                    println!("    Output:    {line}");
                } else {
                    println!("               {line}");
                }
            }
        }
    }
    println!();
}
