//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Configuration name recorded in the metadata section
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    pub name: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating keyword configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration to match your keyword store");
        println!("2. Validate it:");
        println!("   labelkit validate --keywords {}", self.output.display());
        println!("3. Use it for classification:");
        println!(
            "   labelkit classify -i labels.txt --keywords {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Keyword configuration "{}"
#
# Categories match the field_type column of the keyword store:
# drug_name, number_of_sheets, company_name, number_field,
# basic_info, drug_description.
# Only the first four are consulted by the classifier rules.

[metadata]
name = "{}"

[keywords]
# Product and compound names
drug_name = ["Paracetamol", "Ibuprofen"]

# Evidence for sheet/tablet count lines
number_of_sheets = ["sheets", "blister"]

# Manufacturer and licence-holder boilerplate
company_name = ["Pharma Group", "Ltd."]

# Colon-terminated fields that hold a number
number_field = ["Lot No", "Batch No", "Exp. Date", "Mfg. Date"]

# Row entries mirror the keyword store table; inactive rows are skipped.
# [[entry]]
# keyword = "Serial No"
# field_type = "number_field"
# is_active = true
"#,
            self.name, self.name
        )
    }
}
