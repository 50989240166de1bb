use brdocs::{Cnpj, Cpf, DocumentStrExt};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=brdocs=trace shows generator and validator events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Generated Documents ===\n");

    let cpf = Cpf::generate();
    println!("  CPF:  {}", cpf.as_str());
    println!("    formatted: {}", cpf.format());
    println!("    valid:     {}", Cpf::is_valid(cpf.as_str()));

    let cnpj = Cnpj::generate();
    println!("  CNPJ: {}", cnpj.as_str());
    println!("    formatted: {}", cnpj.format());
    println!("    valid:     {}", Cnpj::is_valid(cnpj.as_str()));

    println!("\n=== Validating Input ===\n");

    let inputs = [
        "529.982.247-25",
        "123.456.789-00",
        "111.111.111-11",
        "04.252.011/0001-10",
        "11.111.111/1111-11",
    ];

    for input in &inputs {
        println!(
            "  {input:<20} cpf={:<5} cnpj={}",
            input.is_valid_cpf(),
            input.is_valid_cnpj()
        );
    }

    println!("\n=== Strict Construction ===\n");

    match Cpf::create("123.456.789-00") {
        Ok(cpf) => println!("  accepted {cpf}"),
        Err(e) => println!("  rejected: {e}"),
    }
}
