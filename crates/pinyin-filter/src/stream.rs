use crate::token::Token;

/// A pull-based source of tokens.
///
/// `next_token` yields one token per call and `Ok(None)` once the stream is
/// exhausted. Filters forward their upstream's errors untouched, so a whole
/// chain shares the innermost stream's `Error` type.
pub trait TokenStream {
    type Error;

    fn next_token(&mut self) -> Result<Option<Token>, Self::Error>;

    /// Rewind to the beginning, discarding any partially emitted token.
    fn reset(&mut self) {}

    /// Adapt into an `Iterator`. Iteration stops after the first error.
    fn tokens(self) -> TokenIter<Self>
    where
        Self: Sized,
    {
        TokenIter {
            stream: self,
            done: false,
        }
    }
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    type Error = S::Error;

    fn next_token(&mut self) -> Result<Option<Token>, Self::Error> {
        (**self).next_token()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

pub struct TokenIter<S> {
    stream: S,
    done: bool,
}

impl<S: TokenStream> Iterator for TokenIter<S> {
    type Item = Result<Token, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.stream.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Wraps any `Iterator<Item = Result<Token, E>>` as a stream.
///
/// Iterators cannot rewind, so `reset` is a no-op.
pub struct IterSource<I> {
    iter: I,
}

impl<I> IterSource<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I, E> TokenStream for IterSource<I>
where
    I: Iterator<Item = Result<Token, E>>,
{
    type Error = E;

    fn next_token(&mut self) -> Result<Option<Token>, E> {
        self.iter.next().transpose()
    }
}
