//! Shared test fixture: a miniature FastQC-style report covering the
//! module shapes the parser and encoders have to handle. Kmer Content is
//! deliberately absent.

pub const SAMPLE_REPORT: &str = concat!(
    "##FastQC\t0.10.1\n",
    ">>Basic Statistics\tpass\n",
    "#Measure\tValue\n",
    "Filename\tsample.fastq\n",
    "File type\tConventional base calls\n",
    "Encoding\tSanger / Illumina 1.9\n",
    "Total Sequences\t1000\n",
    "Filtered Sequences\t0\n",
    "Sequence length\t100\n",
    "%GC\t48\n",
    ">>END_MODULE\n",
    ">>Per base sequence quality\tpass\n",
    "#Base\tMean\tMedian\tLower Quartile\tUpper Quartile\t10th Percentile\t90th Percentile\n",
    "1\t20.0\t20.0\t18.0\t22.0\t16.0\t24.0\n",
    "2\t20.0\t20.0\t18.0\t22.0\t16.0\t24.0\n",
    ">>END_MODULE\n",
    ">>Per sequence quality scores\tpass\n",
    "#Quality\tCount\n",
    "20\t400.0\n",
    "21\t600.0\n",
    ">>END_MODULE\n",
    ">>Per base sequence content\tpass\n",
    "#Base\tG\tA\tT\tC\n",
    "1\t24.0\t26.0\t26.0\t24.0\n",
    "2\t24.5\t25.5\t25.5\t24.5\n",
    ">>END_MODULE\n",
    ">>Per sequence GC content\tpass\n",
    "#GC Content\tCount\n",
    "48\t700.0\n",
    "49\t300.0\n",
    ">>END_MODULE\n",
    ">>Per base N content\tpass\n",
    "#Base\tN-Count\n",
    "1\t0.0\n",
    "2\t1.0\n",
    ">>END_MODULE\n",
    ">>Sequence Length Distribution\tpass\n",
    "#Length\tCount\n",
    "100\t1000.0\n",
    ">>END_MODULE\n",
    ">>Sequence Duplication Levels\tpass\n",
    "#Total Duplicate Percentage\t12.5\n",
    "#Duplication Level\tPercentage of deduplicated\tPercentage of total\n",
    "1\t80.0\t85.0\n",
    "2\t15.0\t10.0\n",
    ">>END_MODULE\n",
    ">>Overrepresented sequences\tpass\n",
    "#Sequence\tCount\tPercentage\tPossible Source\n",
    "ACGTACGTAC\t50\t5.0\tNo Hit\n",
    ">>END_MODULE\n",
);
