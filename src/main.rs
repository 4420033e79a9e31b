use colored::Colorize;
use lazyseq::base::{stop, BaseError, Number, SeqError, Value};
use lazyseq::{constant, integers, integers_from, value_of};

fn leq(limit: i64) -> impl Fn(&Value) -> Result<bool, BaseError> {
    move |value| Ok(value.as_num()? <= &Number::from(limit))
}

fn plus(step: i64) -> impl Fn(&Value) -> Result<Value, BaseError> {
    move |value| Ok(Value::Number(value.as_num()? + step))
}

fn add(acc: Value, value: &Value) -> Result<Value, BaseError> {
    Ok(Value::Number(acc.as_num()? + value.as_num()?))
}

fn mul(acc: Value, value: &Value) -> Result<Value, BaseError> {
    Ok(Value::Number(acc.as_num()? * value.as_num()?))
}

fn show(value: Option<Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "undefined".to_string()
    }
}

fn main() {
    ctrlc::set_handler(stop::send_stop).expect("failed to install Ctrl-C handler");
    if let Err(err) = run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SeqError> {
    println!("{}", "lazy sequences".bold());

    let nn = value_of(3).cons(4).cons(5).cons(6).cons(7)
        .cons(8).cons(9).cons(10).cons(11).cons(12);
    let nm = value_of(100).cons(101).cons(102).cons(103)
        .cons(104).cons(105).cons(106).cons(107);
    println!("nn = {nn:.60}");
    println!("nm = {nm:.60}");

    println!("\n{}", "merge, then filter(<= 102)".cyan());
    nn.merge(&nm).filter(leq(102))?
        .for_each(|value| println!("  {value}"))?;
    let total = nn.merge(&nm).filter(leq(102))?.fold(0, add)?;
    println!("sum = {}", show(total));

    println!("\n{}", "reduce".cyan());
    let w = value_of(5).cons(4).cons(3).cons(2).cons(1);
    println!("w = {w:.60}");
    println!("1+2+3+4+5 = {}", show(w.reduce(add)?));
    println!("1*2*3*4*5 = {}", show(w.reduce(mul)?));

    println!("\n{}", "bounded prefix of the integers".cyan());
    integers().take_while(leq(6))?
        .for_each(|value| println!("  {value}"))?;

    println!("\n{}", "factorial by composition".cyan());
    let fact = integers().map(plus(1)).take_while(leq(6))?.reduce(mul)?;
    println!("6! = {}", show(fact));

    println!("\n{}", "generators".cyan());
    println!("constant(5)      = {}", constant(5));
    let node = integers_from(0);
    println!("integers_from(0) = {node}");
    println!("value            = {}", node.value()?);
    if let Some(next) = node.next()? {
        println!("next value       = {}", next.value()?);
        if let Some(third) = next.next()? {
            println!("third value      = {}", third.value()?);
        }
    }
    Ok(())
}
