use anyhow::Result;

fn main() -> Result<()> {
    println!("annotated scan target");
    Ok(())
}
