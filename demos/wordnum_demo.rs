//! Wordnum 演示程序
//!
//! 演示英文基数词转换与文本规范化的完整功能
//!
//! 运行：cargo run --example wordnum_demo

use wordnum_core::{words_to_number, NumberNormalizer};

fn main() {
    wordnum_core::init_logging();

    println!("=== Wordnum 基数词转换演示 ===\n");

    // 测试用例
    let test_cases = vec![
        ("zero", 0),
        ("one", 1),
        ("twenty", 20),
        ("twenty one", 21),
        ("two hundred forty-six", 246),
        ("one hundred and twenty-four", 124),
        ("one thousand two hundred thirty four", 1234),
        (
            "seven hundred eighty-three thousand nine hundred and nineteen",
            783_919,
        ),
        ("one million", 1_000_000),
    ];

    println!("【短语转换】\n");
    for (i, (input, expected)) in test_cases.iter().enumerate() {
        match words_to_number(input) {
            Ok(value) => {
                let status = if value == *expected { "✓" } else { "✗" };
                println!("#{} {} \"{}\"", i + 1, status, input);
                println!("     输出: {}  期望: {}\n", value, expected);
            }
            Err(err) => {
                println!("#{} ✗ \"{}\"", i + 1, input);
                println!("     错误: {}\n", err);
            }
        }
    }

    println!("【文本规范化】\n");
    let normalizer = NumberNormalizer::default();
    let text = "we sold twenty one tickets for one hundred and twenty-four euros";
    let result = normalizer.process(text);

    println!("原始: \"{}\"", text);
    println!("输出: \"{}\"", result.text);
    println!("变更: {} 处", result.changes.len());
    for change in &result.changes {
        println!(
            "  - \"{}\" → \"{}\"",
            change.original_text, change.normalized_text
        );
    }
}
