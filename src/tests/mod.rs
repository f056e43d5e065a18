#[cfg(test)]
mod common;

#[cfg(test)]
mod test_max_hp;

#[cfg(test)]
mod test_catch;
