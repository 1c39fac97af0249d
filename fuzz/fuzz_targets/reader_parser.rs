#![no_main]

use libfuzzer_sys::fuzz_target;
use tinystat::reader::{read_measurements, Delimiter};
use tinystat::summarize;

fuzz_target!(|data: &[u8]| {
    // Neither the reader nor summarize should panic on any input
    for delimiter in [Delimiter::Tab, Delimiter::Space, Delimiter::Comma] {
        if let Ok(values) = read_measurements(data, 0, delimiter) {
            let _ = summarize(&values);
        }
    }
});
