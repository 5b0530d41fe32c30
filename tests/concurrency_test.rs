use std::thread;
use strconv_kit::{from_hex, from_int64, to_base64, to_hex, to_int64, to_json};

#[test]
fn test_conversions_from_many_threads() {
    let handles: Vec<_> = (0..16i64)
        .map(|t| {
            thread::spawn(move || {
                for i in 0..500i64 {
                    let n = t * 1_000_000 + i;
                    let text = from_int64(n);
                    assert_eq!(to_int64(&text).unwrap(), n);

                    let bytes = n.to_be_bytes();
                    assert_eq!(from_hex(&to_hex(bytes)).unwrap(), bytes);
                    assert!(!to_base64(bytes).is_empty());
                    assert_eq!(to_json(&n).unwrap(), text);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}
