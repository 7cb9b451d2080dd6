use automa_compiler::parse;

pub struct AstArgs {
    pub pattern: String,
}

pub fn run(args: AstArgs) {
    let ast = match parse(&args.pattern) {
        Ok(ast) => ast,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&ast) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
