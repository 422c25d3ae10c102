#![no_main]

use fuzzrel::serializers::system_from_json;
use fuzzrel::Solver;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = system_from_json(s) {
            let _ = Solver::new(doc.family).extremal(&doc.a, &doc.b, doc.mode);
        }
    }
});
