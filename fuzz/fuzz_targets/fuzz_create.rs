#![no_main]

use brdocs::{Cnpj, Cpf, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Rejections are fine, panics are bugs.
        let digits = normalize(s);
        assert_eq!(normalize(&digits), digits);

        if let Some(cpf) = Cpf::try_create(s) {
            assert_eq!(normalize(&cpf.format()), cpf.as_str());
        }
        if let Some(cnpj) = Cnpj::try_create(s) {
            assert_eq!(normalize(&cnpj.format()), cnpj.as_str());
        }
    }
});
