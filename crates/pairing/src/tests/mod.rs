mod test_final_exp;
mod test_pairing;
