mod repl {
    use calcyard::Calculator;

    pub fn evalexpr(calc: &Calculator, input: &str) {
        match calc.to_rpn(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => match calc.eval_rpn(&rpn) {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => println!("{}", result),
            },
        }
    }

    // ':unary <tok>' and ':binary <tok>' rebind the minus tokens,
    // ':rpn <expr>' shows the postfix form, anything else is evaluated
    pub fn parse_statement(calc: &mut Calculator, input: &str) {
        let trimmed = input.trim_start();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };
        let rebound = match command {
            ":unary" => calc.set_unary_minus(rest),
            ":binary" => calc.set_binary_minus(rest),
            ":rpn" => {
                match calc.to_rpn(rest) {
                    Err(e) => println!("Parse error: {}", e),
                    Ok(rpn) => println!("{}", rpn),
                }
                return;
            }
            _ => return evalexpr(calc, input),
        };
        match rebound {
            Err(e) => println!("Config error: {}", e),
            Ok(()) => println!(
                "unary minus: {}, binary minus: {}",
                calc.unary_minus(),
                calc.binary_minus()
            ),
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();
    let mut calc = calcyard::Calculator::new();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&calc, &input);
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".calcyard_history"));
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(&line) {
                    log::warn!("couldn't add history entry: {}", e);
                }
                repl::parse_statement(&mut calc, &line);
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
