//! Basic usage example for the labelkit core

use labelkit_core::{
    classify, font_runs, segment, FieldType, FontScheme, KeywordList, LabelProcessor,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Direct classification against an in-memory keyword list
    println!("=== Method 1: Direct Classification ===");
    let keywords = KeywordList::from_grouped([
        (FieldType::DrugName, vec!["Paracetamol"]),
        (FieldType::CompanyName, vec!["ACME Corp"]),
        (FieldType::NumberField, vec!["Lot No", "Exp. Date"]),
    ]);

    for line in ["Paracetamol 500mg", "Lot No:", "Made in USA:", "BGX-123"] {
        println!("  {:20} -> {}", line, classify(line, &keywords));
    }

    // Method 2: Script segmentation for font selection
    println!("\n=== Method 2: Script Segmentation ===");
    for seg in segment("对乙酰氨基酚片 Paracetamol 500mg") {
        println!("  {:12} {:?}", seg.script.as_str(), seg.text);
    }

    // Method 3: Font runs ready for a PDF renderer
    println!("\n=== Method 3: Font Runs ===");
    let scheme = FontScheme::new("NotoSansCJK", "Helvetica");
    for run in font_runs("用法：Oral use", &scheme) {
        println!("  [{}] {:?}", run.font, run.text);
    }

    // Method 4: The processor facade over a whole label
    println!("\n=== Method 4: Label Processor ===");
    let processor = LabelProcessor::builder()
        .keywords(keywords)
        .fonts(scheme)
        .build();

    let label = "Paracetamol 500mg\nExp. Date:\nKeep out of reach of children";
    for record in processor.process_lines(label) {
        println!("  line {}: {} ({})", record.line, record.text, record.field_type);
    }

    Ok(())
}
