use rabin_karp::search_str;

fn main() {
    println!("--- Rabin-Karp Search ---");

    let runs = [
        ("Short text, multiple occurrences", "abracadabra", "abra"),
        (
            "Medium text, single occurrence",
            "thequickbrownfoxjumpsoverthelazydog",
            "fox",
        ),
        ("Longer text", "GCATCGCAGAGAGTATACAGTACG", "GCAG"),
        ("No match", "hello world", "goodbye"),
    ];

    for (i, (label, text, pattern)) in runs.iter().enumerate() {
        println!("\nRun {}: {}", i + 1, label);
        println!("Text:    {:?}", text);
        println!("Pattern: {:?}", pattern);
        println!("Found at indices: {:?}", search_str(text, pattern));
    }
}
