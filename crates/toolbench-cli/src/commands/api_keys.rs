//! API-keys command - work out key requirements for a polling schedule.

use colored::Colorize;
use toolbench::api_keys::calculate;
use toolbench::ApiKeysInput;

pub fn run(input: ApiKeysInput, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let output = calculate(&input)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "API key requirements".cyan().bold());
    println!();
    println!(
        "  Required keys:          {}",
        output.required_keys.to_string().white().bold()
    );
    println!("  Days before limit:      {}", output.days_before_limit);
    println!(
        "  Requests per operation: {:.2}",
        output.calculated_requests_per_operation
    );
    println!(
        "  Rotate keys every:      {:.2} days",
        output.api_key_rotation_interval
    );

    if let Some(interval) = output.new_interval {
        let keys = input.available_keys.unwrap_or_default();
        println!();
        println!(
            "{} With {} keys, run at most every {} minutes",
            "Tip:".yellow(),
            keys,
            interval.to_string().white().bold()
        );
    }

    Ok(())
}
