use tokio::{
    fs,
    io::{self, AsyncBufReadExt, BufReader, Lines, Stdin},
};

/// Read a file from the given path into a string
pub async fn read_text(path: &str) -> io::Result<String> {
    fs::read_to_string(path).await
}

/// Line-by-line reader over stdin
pub fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(io::stdin()).lines()
}
